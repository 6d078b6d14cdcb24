use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal;

/// Raw mode, disabled again on drop.
pub struct RawMode;

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Alternate screen with mouse capture and a hidden cursor. Everything is restored on drop,
/// including when entering fails half way.
pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        let mut screen = Self { out };

        execute!(
            screen.out,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )?;

        Ok(screen)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::io;
    use std::io::Write;
    use std::rc::Rc;

    use super::Screen;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    /// Records everything written to it, failing the first `fail` writes
    struct Recorder {
        buf: Rc<RefCell<Vec<u8>>>,
        fail: usize,
    }

    impl Write for Recorder {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            if self.fail > 0 {
                self.fail -= 1;
                return Err(io::Error::other("broken pipe"));
            }

            self.buf.borrow_mut().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn written(buf: &Rc<RefCell<Vec<u8>>>) -> String {
        String::from_utf8_lossy(&buf.borrow()).to_string()
    }

    #[test]
    fn drop_restores_screen() {
        let buf = Rc::new(RefCell::new(Vec::new()));

        let screen = Screen::enter(Recorder {
            buf: buf.clone(),
            fail: 0,
        })
        .unwrap();
        assert!(!written(&buf).contains(LEAVE_ALTERNATE_SCREEN));

        drop(screen);
        let out = written(&buf);
        assert!(out.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(out.contains(SHOW_CURSOR));
    }

    #[test]
    fn failed_enter_still_restores_screen() {
        let buf = Rc::new(RefCell::new(Vec::new()));

        let res = Screen::enter(Recorder {
            buf: buf.clone(),
            fail: 1,
        });
        assert!(res.is_err());

        let out = written(&buf);
        assert!(out.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(out.contains(SHOW_CURSOR));
    }
}

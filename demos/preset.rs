use paintlife::camera::Camera;
use paintlife::grid::Grid;
use paintlife::seed::Preset;
use paintlife::stepper::step;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let preset: Preset = args.get(1).map(String::as_str).unwrap_or("glider").parse()?;
    let generations: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 4,
    };

    let mut cam = Camera::new(10, 3);
    let mut grid = Grid::new(cam.width(), cam.height())?;
    preset.stamp(&mut grid);

    for generation in 0..=generations {
        cam.draw(&grid);
        println!("{preset} #{generation}");
        print!("{}", cam.render());

        grid = step(&grid);
    }

    Ok(())
}

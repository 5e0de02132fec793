use std::time::Instant;

mod day04;
mod day06;
mod day10;
mod day12;
mod day15;
mod day16;
mod day18;
mod day20;
mod day21;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    let [_, day_arg, part_arg] = &args[..] else {
        eprintln!("exactly two arguments expected - day number and 1/2 for part");
        std::process::exit(1);
    };

    let day: u8 = day_arg.parse()?;
    let part: u8 = part_arg.parse()?;
    if part != 1 && part != 2 {
        eprintln!("part must be 1 or 2");
        std::process::exit(1);
    }

    let solve = match day {
        4 => day04::solve,
        6 => day06::solve,
        10 => day10::solve,
        12 => day12::solve,
        15 => day15::solve,
        16 => day16::solve,
        18 => day18::solve,
        20 => day20::solve,
        21 => day21::solve,
        _ => {
            eprintln!("no solver for day {day}");
            std::process::exit(1);
        }
    };

    let input = std::fs::read_to_string(format!("input/{day:02}.txt"))?;
    let started = Instant::now();
    println!("{}", solve(part, input.trim_end_matches('\n')));
    println!("{:.2} seconds elapsed", started.elapsed().as_secs_f32());
    Ok(())
}

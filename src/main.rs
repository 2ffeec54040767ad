use anyhow::Result;
use trisum::recursive_sum;

fn main() -> Result<()> {
    env_logger::init();

    let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    log::debug!("summing {} values in groups of up to 3", numbers.len());

    let total = recursive_sum(&numbers, numbers.len())?;
    println!("{}", total);
    Ok(())
}

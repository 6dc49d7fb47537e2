//! This example shows how the buffer grows and re-centers as elements are
//! pushed to both ends. Run with `RUST_LOG=trace` to see every growth event.

use rust_dynarray::DynArray;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new().env().init()?;

    let mut a = DynArray::new();
    for i in 0..12 {
        if i % 2 == 0 {
            a.push_back(i);
        } else {
            a.push_front(i);
        }
        println!("{a:?}\n{}\n", a.layout());
    }

    while a.size() > 2 {
        let front = a.pop_front()?;
        let back = a.pop_back()?;
        println!("popped {front} and {back}, {} left", a.size());
    }
    Ok(())
}

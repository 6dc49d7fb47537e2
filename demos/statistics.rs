//! This example builds a sampled signal and summarizes it

use rust_dynarray::{DynArray64, __testing::RandStreamF64};

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new().env().init()?;

    // a noisy sine wave
    let t = DynArray64::range(0.0, 6.28, 0.01)?;
    let mut noise = RandStreamF64::new(0, -0.1, 0.1);
    let signal = t.map(|x| x.sin() + noise.next().unwrap_or_default());

    println!("samples: {}", signal.size());
    println!("min:     {:.5}", signal.min()?);
    println!("max:     {:.5}", signal.max()?);
    println!("mean:    {:.5}", signal.mean()?);
    println!("median:  {:.5}", signal.median()?);

    // summarize each quarter of the period separately
    for (i, chunk) in signal.split(4).iter().enumerate() {
        println!("quarter {i}: mean {:.5}", chunk.mean()?);
    }

    // the first few samples, rounded to one decimal and de-duplicated
    let head = signal.take(20).map(|x| (x * 10.0).round() / 10.0).unique();
    println!("distinct leading values: {head}");
    Ok(())
}

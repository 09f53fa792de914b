use anyhow::Result;

use termfolio_core::Portfolio;

pub fn run(portfolio: &Portfolio, pretty: bool) -> Result<()> {
    println!("{}", portfolio.to_json(pretty)?);
    Ok(())
}

use std::io;

use mri_hook::{LedgerQuery, MriClient, PageRequest, RequestHandler};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut query = LedgerQuery::new(
        required_env("MRI_START_DATE")?,
        required_env("MRI_END_DATE")?,
        required_env("MRI_RESIDENT_NAME_ID")?,
        required_env("MRI_PROPERTY_ID")?,
    );
    if let Ok(skip) = std::env::var("MRI_SKIP") {
        query.page = PageRequest::new(300, skip.parse()?);
    }

    let client = MriClient::from_env()?;
    let page = client.ledger().execute(query)?;

    for transaction in &page.values {
        println!(
            "transaction_id: {:?}, date: {:?}, charge_code: {:?}, amount: {}",
            transaction.transaction_id,
            transaction.transaction_date,
            transaction.charge_code,
            transaction.transaction_amount_value()
        );
    }
    println!("transactions: {}, next_link: {:?}", page.values.len(), page.next_link);

    Ok(())
}

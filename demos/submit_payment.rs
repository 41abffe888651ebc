use std::io;

use chrono::NaiveDate;
use mri_hook::{MriClient, PaymentRequest, PaymentSubmission, RequestHandler};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paid_at = NaiveDate::parse_from_str(&required_env("MRI_PAID_AT")?, "%Y-%m-%d")?;
    let request = PaymentRequest {
        resident_name_id: Some(required_env("MRI_RESIDENT_NAME_ID")?),
        property_id: Some(required_env("MRI_PROPERTY_ID")?),
        paid_at: Some(paid_at),
        amount: Some(required_env("MRI_AMOUNT")?.parse()?),
        check_number: Some(required_env("MRI_CHECK_NUMBER")?),
        external_transaction_number: Some(required_env("MRI_EXTERNAL_TRANSACTION_NUMBER")?),
        charge_id: Some(required_env("MRI_CHARGE_ID")?),
        external_batch_id: Some(required_env("MRI_EXTERNAL_BATCH_ID")?),
        description: Some("Rent payment".to_owned()),
        batch_description: Some("Online payments".to_owned()),
        check_url: std::env::var("MRI_CHECK_URL").ok(),
        deposit_date: None,
    };

    let client = MriClient::from_env()?;
    match client.payments().execute(request)? {
        PaymentSubmission::Accepted { status, payment } => println!(
            "status: {status}, transaction_id: {:?}, batch_id: {:?}, amount: {:?}",
            payment.transaction_id,
            payment.batch_id,
            payment.formatted_amount()
        ),
        PaymentSubmission::Rejected { status, error } => {
            println!("status: {status}, rejected: {error}")
        }
        PaymentSubmission::NoRecord => println!("no record returned"),
    }

    Ok(())
}

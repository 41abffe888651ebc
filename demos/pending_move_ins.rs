use std::io;

use mri_hook::{MriClient, PendingMoveInsQuery, RequestHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let property_id = std::env::var("MRI_PROPERTY_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MRI_PROPERTY_ID environment variable is required",
        )
    })?;

    let client = MriClient::from_env()?;
    let page = client
        .pending_move_ins()
        .execute(PendingMoveInsQuery::new(property_id))?;

    for move_in in &page.values {
        println!(
            "name_id: {:?}, name: {}, move_in: {:?}, previous_address: {:?}",
            move_in.resident_name_id,
            move_in.full_name(),
            move_in.scheduled_move_in_date,
            move_in.primary_previous_address().map(|address| address.full_address())
        );
    }
    println!("pending: {}, next_link: {:?}", page.values.len(), page.next_link);

    Ok(())
}

use std::io;

use mri_hook::{MriClient, RequestHandler, ResidentsByPropertyQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let property_id = std::env::var("MRI_PROPERTY_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MRI_PROPERTY_ID environment variable is required",
        )
    })?;

    let client = MriClient::from_env()?;
    let residents = client
        .residents_by_property()
        .execute(ResidentsByPropertyQuery::new(property_id))?;

    for resident in &residents {
        println!(
            "name_id: {:?}, name: {}, active: {}",
            resident.resident_name_id,
            resident.full_name(),
            resident.is_active()
        );
    }
    println!("residents: {}", residents.len());

    Ok(())
}

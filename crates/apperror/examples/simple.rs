use apperror::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("Simple AppError example");

    // Creating errors
    println!("\nCreating errors:");

    let not_found = create(
        "not_found",
        ErrorOptions::new()
            .with_status(404)
            .with_message("User not found")
            .with_public(true),
    );
    println!("   Public: {not_found}");

    let internal = app_error!("db_unreachable", "connection to {} refused", "10.0.0.3");
    println!("   Private: {internal}");

    // Wrapping keeps one flat list of causes
    println!("\nWrapping:");
    match load_profile("user-123") {
        Ok(profile) => println!("   Success: {profile}"),
        Err(e) => {
            println!("   Error: {e}");
            for cause in e.errors() {
                println!("     caused by: {cause}");
            }
            println!("   On the wire: {}", String::from_utf8(serialize(&e))?);
        }
    }

    println!("\nPublic on the wire: {}", String::from_utf8(serialize(&not_found))?);

    Ok(())
}

fn query_user(id: &str) -> Result<String> {
    Err::<String, _>(io_failure()).wrap_err_with("db_query_failed", || {
        ErrorOptions::new().with_data(id.to_string())
    })
}

fn load_profile(id: &str) -> Result<String> {
    query_user(id).wrap_err_with("profile_unavailable", || {
        ErrorOptions::new().with_status(503).with_message("loading profile")
    })
}

fn io_failure() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused")
}

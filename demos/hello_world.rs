use std::sync::Arc;

use fndi::{assert_fn, callable, inject, Provide, Providers, Value};

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Debug)]
struct User {
    #[allow(unused)]
    username: String,
}

#[derive(Debug, thiserror::Error)]
enum UserError {
    #[error("invalid credentials")]
    InvalidAuth,
}

trait Directory: Send + Sync {
    fn check(&self, credentials: &Credentials) -> bool;
}

#[derive(Clone, Provide)]
#[provide(Directory)]
struct AdminOnly;

impl Directory for AdminOnly {
    fn check(&self, credentials: &Credentials) -> bool {
        (&*credentials.username, &*credentials.password) == ("admin", "admin")
    }
}

fn login(
    directory: Arc<dyn Directory>,
    credentials: Credentials,
) -> (Result<User, UserError>,) {
    if directory.check(&credentials) {
        (Ok(User {
            username: credentials.username,
        }),)
    } else {
        (Err(UserError::InvalidAuth),)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = callable(login);

    let sample: Result<User, UserError> = Err(UserError::InvalidAuth);
    assert_fn(&login, Some(&[Value::new(sample)]))?;

    let providers = Providers::new()
        .with(Credentials {
            username: "admin".to_string(),
            password: "admin".to_string(),
        })
        .with_provided(AdminOnly);

    for result in inject(&login, &providers)? {
        match result.downcast::<Result<User, UserError>>() {
            Ok(user) => println!("User: {:?}", user),
            Err(other) => println!("Unexpected result: {:?}", other),
        }
    }

    Ok(())
}

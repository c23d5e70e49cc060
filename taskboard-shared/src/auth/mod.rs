/// Authentication utilities
///
/// Taskboard does not manage user accounts itself; an external identity
/// provider issues HS256-signed JWTs and this module consumes them.
///
/// # Modules
///
/// - [`jwt`]: JWT token creation and validation
/// - [`middleware`]: Axum middleware that resolves a Bearer token to an
///   [`middleware::AuthContext`] carrying the caller's user id
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::auth::jwt::{create_token, validate_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(Uuid::new_v4());
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long!!")?;
/// let validated = validate_token(&token, "secret-key-at-least-32-bytes-long!!")?;
/// assert_eq!(validated.sub, claims.sub);
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;

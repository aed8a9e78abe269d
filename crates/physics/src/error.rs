use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("invalid cart-pole config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

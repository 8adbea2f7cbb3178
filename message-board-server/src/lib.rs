pub mod backends;
pub mod errors;
pub mod form;
pub mod params;
pub mod services;
pub mod state;
pub mod views;
pub mod workflows;

#[cfg(test)]
mod testing;

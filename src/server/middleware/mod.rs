//! Request guards applied inside handlers.

pub mod auth;

#[cfg(test)]
mod test;

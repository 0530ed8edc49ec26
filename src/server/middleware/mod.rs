pub mod auth;
pub mod security;
pub mod session;

#[cfg(test)]
mod test;

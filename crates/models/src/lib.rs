pub mod errors;
pub mod db;
pub mod jersey;

#[cfg(test)]
mod tests;

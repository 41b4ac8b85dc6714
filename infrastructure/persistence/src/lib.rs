pub mod key_value {
    pub mod file;
    pub mod postgres;
}

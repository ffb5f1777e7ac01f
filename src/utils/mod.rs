pub mod cep;
pub mod mask;
pub mod money;
pub mod plate;
pub mod renavam;

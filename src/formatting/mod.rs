mod email;
mod phone;
mod size;
mod tax_id;

pub use email::is_valid_email;
pub use phone::{Country, CountryConfig, PhoneField};
pub use size::{format_file_size, format_megabytes};
pub use tax_id::{format_tax_id, is_cnpj, is_cpf, unformat_tax_id};

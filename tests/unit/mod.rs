mod database_tests;
mod domain_tests;
mod formatting_tests;
mod payment_tests;
mod signature_tests;
mod template_tests;

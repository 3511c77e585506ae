pub mod books;
pub mod crud;
pub mod people;
pub mod validation;

pub use books::BookService;
pub use crud::CrudService;
pub use people::PersonService;
pub use validation::RequestValidator;

//! Password hashing backed by bcrypt

mod bcrypt_hasher;


pub use bcrypt_hasher::BcryptPasswordHasher;

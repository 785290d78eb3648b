pub mod hs256_token_repository;

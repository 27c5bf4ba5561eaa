pub mod mason_repository;

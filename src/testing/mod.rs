pub mod random_ops;

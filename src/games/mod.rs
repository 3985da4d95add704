pub mod bluff;

pub mod day_17;

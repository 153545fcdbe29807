pub mod mapquest;

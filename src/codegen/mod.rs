pub mod csharp;
pub mod csharp_gen;
pub mod shared;

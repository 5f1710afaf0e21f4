pub mod nbrb;

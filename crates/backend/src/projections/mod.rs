pub mod p001_planning;

pub mod d001_health;

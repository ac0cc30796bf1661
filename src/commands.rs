pub mod analyze;
pub mod best_move;
pub mod self_play;

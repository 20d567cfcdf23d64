use snake_game_core::session::GameSession;
use snake_game_core::types::Move;

/// Greedy pilot: heads for the food by manhattan distance, never into a wall
/// or a body cell. Returns `None` when boxed in or when there is no food.
pub fn pick_move(session: &GameSession) -> Option<Move> {
    let head = session.snake().head();
    let target = session.food_cell()?;
    let heading = session.heading();
    Move::all()
        .into_iter()
        .filter(|mv| mv.is_not_opposite(&heading))
        .map(|mv| (mv, head.neighbour(mv)))
        .filter(|(_, next)| session.grid().contains(*next) && !session.snake().contains(*next))
        .min_by_key(|(_, next)| (next.x - target.x).abs() + (next.y - target.y).abs())
        .map(|(mv, _)| mv)
}

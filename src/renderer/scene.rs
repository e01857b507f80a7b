//! Frame composition: what gets drawn for a session

use glam::DVec2;

use super::{Renderer, colors};
use crate::sim::Session;

/// Draw the player, every obstacle and, when frozen, the game-over text
pub fn draw_session(session: &Session, renderer: &mut impl Renderer) {
    let field = &session.config().field;
    renderer.clear(field.width, field.height);

    session.player.body.draw(renderer, colors::PLAYER);
    for obstacle in &session.obstacles {
        obstacle.body.draw(renderer, colors::obstacle(obstacle.kind));
    }

    if let Some((message, instruction)) = session.game_over_text() {
        let center = DVec2::new(field.width / 2.0, field.height / 2.0);
        renderer.draw_text(message, instruction, center);
    }
}

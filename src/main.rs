use macroquad::prelude::{Conf, KeyCode, get_frame_time, is_key_pressed, next_frame};
use snake_arcade::audio::{Audio, MUSIC_PATH};
use snake_arcade::game::{GameConfig, GameState, Ticker};
use snake_arcade::input;
use snake_arcade::render::{self, APPLE_SPRITE_PATH, Renderer};
use snake_arcade::save::SaveStore;

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Snake".to_owned(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn flush_high_score(store: &SaveStore, score: u32) {
    if let Err(err) = store.record_high_score(score) {
        log::error!("problem writing high score: {err}");
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = GameConfig::default();
    if let Err(err) = config.validate() {
        log::error!("invalid game config: {err}");
        return;
    }

    let store = SaveStore::from_env();
    let save = store.load();
    log::info!("high score {} from {}", save.best_score, store.path().display());

    let audio = Audio::load(MUSIC_PATH, save.sound_volume).await;
    audio.start_music();
    let renderer = Renderer::load(APPLE_SPRITE_PATH).await;

    let mut ticker = Ticker::new(config.tick_interval());
    let mut state = GameState::new(config, save.best_score);

    loop {
        if is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Turns land here, between ticks.
        let mut restarted = false;
        for intent in input::poll_intents() {
            restarted |= input::apply(&mut state, intent);
        }
        if !state.is_running() && render::replay_clicked(state.config()) {
            state.restart();
            restarted = true;
        }
        if restarted {
            ticker.reset();
        }

        for _ in 0..ticker.advance(get_frame_time()) {
            let outcome = state.tick();
            if outcome.ate_apple {
                audio.play_eat();
            }
            if outcome.new_high_score {
                flush_high_score(&store, state.high_score());
            }
            if outcome.game_over {
                audio.play_die();
                break;
            }
        }

        renderer.draw(&state);
        next_frame().await;
    }

    log::info!("bye");
}

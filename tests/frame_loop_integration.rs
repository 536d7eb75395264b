//! Frame loop integration tests: input dispatch, motion, rendering order and
//! the audio bridge, driven through a recording surface.

use std::collections::VecDeque;
use std::time::Duration;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use bounceloop::components::movingrect::{MovingRect, Rect};
use bounceloop::events::audio::{AudioCmd, AudioMessage};
use bounceloop::frameloop::FrameLoop;
use bounceloop::game::{self, Label, Player, SceneLayout};
use bounceloop::platform::{InputSource, RenderSurface};
use bounceloop::resources::arena::Arena;
use bounceloop::resources::audio::AudioBridge;
use bounceloop::resources::drawcolor::{DrawColor, SharedDrawColor};
use bounceloop::resources::input::{InputSnapshot, Key, Transition};
use bounceloop::resources::loopstate::LoopState;
use bounceloop::resources::playback::{MusicStatus, PlaybackState};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Clear(DrawColor),
    Draw(String, Option<Rect>),
    Present,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl RenderSurface for Recorder {
    fn clear(&mut self, color: DrawColor) {
        self.ops.push(Op::Clear(color));
    }
    fn draw_texture(&mut self, tex_key: &str, dest: Option<Rect>) {
        self.ops.push(Op::Draw(tex_key.to_string(), dest));
    }
    fn present(&mut self) {
        self.ops.push(Op::Present);
    }
}

/// Replays queued snapshots, then asks to close the window.
struct ScriptedHost {
    script: VecDeque<InputSnapshot>,
    surface: Recorder,
}

impl InputSource for ScriptedHost {
    fn poll_input(&mut self) -> InputSnapshot {
        self.script
            .pop_front()
            .unwrap_or_else(|| InputSnapshot::new().with_transition(Transition::WindowClose))
    }
}

impl RenderSurface for ScriptedHost {
    fn clear(&mut self, color: DrawColor) {
        self.surface.clear(color);
    }
    fn draw_texture(&mut self, tex_key: &str, dest: Option<Rect>) {
        self.surface.draw_texture(tex_key, dest);
    }
    fn present(&mut self) {
        self.surface.present();
    }
}

fn layout() -> SceneLayout {
    SceneLayout {
        arena: Arena::new(800, 600),
        text_size: (300, 100),
        text_speed: 2,
        sprite_size: (128, 128),
        sprite_step: 10,
    }
}

struct Harness {
    frame_loop: FrameLoop,
    rx_cmd: Receiver<AudioCmd>,
    tx_msg: Sender<AudioMessage>,
}

fn harness() -> Harness {
    let mut world = game::build_world(layout());
    let (tx_cmd, rx_cmd) = unbounded();
    let (tx_msg, rx_msg) = unbounded();
    world.insert_resource(AudioBridge::new(tx_cmd, rx_msg));
    Harness {
        frame_loop: FrameLoop::new(world),
        rx_cmd,
        tx_msg,
    }
}

fn label(frame_loop: &mut FrameLoop) -> MovingRect {
    let world = frame_loop.world_mut();
    let mut q = world.query_filtered::<&MovingRect, With<Label>>();
    *q.single(world).unwrap()
}

fn set_label(frame_loop: &mut FrameLoop, rect: MovingRect) {
    let world = frame_loop.world_mut();
    let mut q = world.query_filtered::<&mut MovingRect, With<Label>>();
    *q.single_mut(world).unwrap() = rect;
}

fn sprite(frame_loop: &mut FrameLoop) -> MovingRect {
    let world = frame_loop.world_mut();
    let mut q = world.query_filtered::<&MovingRect, With<Player>>();
    *q.single(world).unwrap()
}

fn key_down(key: Key) -> InputSnapshot {
    InputSnapshot::new().with_transition(Transition::KeyDown(key))
}

#[test]
fn frame_draws_background_text_sprite_in_order() {
    let mut h = harness();
    let mut surface = Recorder::default();

    let state = h.frame_loop.step(InputSnapshot::new(), &mut surface);

    assert_eq!(state, LoopState::Running);
    assert_eq!(
        surface.ops,
        vec![
            Op::Clear(DrawColor::BLACK),
            Op::Draw("background".into(), None),
            Op::Draw("text".into(), Some(Rect::new(252, 252, 300, 100))),
            Op::Draw("sprite".into(), Some(Rect::new(0, 0, 128, 128))),
            Op::Present,
        ]
    );
}

#[test]
fn clear_uses_the_shared_color() {
    let mut h = harness();
    let shared = h.frame_loop.world().resource::<SharedDrawColor>().clone();
    shared.store(DrawColor::new(10, 20, 30));

    let mut surface = Recorder::default();
    h.frame_loop.step(InputSnapshot::new(), &mut surface);

    assert_eq!(surface.ops[0], Op::Clear(DrawColor::new(10, 20, 30)));
}

#[test]
fn escape_wins_over_held_movement() {
    let mut h = harness();
    let before_sprite = sprite(&mut h.frame_loop);
    let before_label = label(&mut h.frame_loop);
    let mut surface = Recorder::default();

    let input = key_down(Key::Escape).with_held(Key::Right);
    let state = h.frame_loop.step(input, &mut surface);

    assert_eq!(state, LoopState::Terminated);
    assert!(surface.ops.is_empty());
    assert_eq!(sprite(&mut h.frame_loop), before_sprite);
    assert_eq!(label(&mut h.frame_loop), before_label);
    assert_eq!(h.frame_loop.frames(), 0);
}

#[test]
fn window_close_terminates() {
    let mut h = harness();
    let mut surface = Recorder::default();
    let input = InputSnapshot::new().with_transition(Transition::WindowClose);
    assert_eq!(
        h.frame_loop.step(input, &mut surface),
        LoopState::Terminated
    );
}

#[test]
fn transitions_behind_a_quit_are_discarded() {
    let mut h = harness();
    let mut surface = Recorder::default();
    let input = key_down(Key::Escape).with_transition(Transition::KeyDown(Key::Space));

    h.frame_loop.step(input, &mut surface);

    let shared = h.frame_loop.world().resource::<SharedDrawColor>().clone();
    assert_eq!(shared.writes(), 0);
    assert_eq!(h.rx_cmd.try_iter().count(), 0);
}

#[test]
fn terminated_loop_ignores_further_steps() {
    let mut h = harness();
    let mut surface = Recorder::default();
    h.frame_loop.step(key_down(Key::Escape), &mut surface);

    let state = h
        .frame_loop
        .step(InputSnapshot::new().with_held(Key::Right), &mut surface);

    assert_eq!(state, LoopState::Terminated);
    assert!(surface.ops.is_empty());
    assert_eq!(sprite(&mut h.frame_loop).x, 0);
}

#[test]
fn idle_frames_move_only_the_label() {
    let mut h = harness();
    let mut surface = Recorder::default();

    for _ in 0..10 {
        h.frame_loop.step(InputSnapshot::new(), &mut surface);
    }

    let s = sprite(&mut h.frame_loop);
    assert_eq!((s.x, s.y), (0, 0));
    let l = label(&mut h.frame_loop);
    assert_eq!((l.x, l.y), (270, 270));
    assert_eq!(h.frame_loop.frames(), 10);
    assert_eq!(h.rx_cmd.try_iter().count(), 0);
}

#[test]
fn sprite_in_corner_cannot_go_left_but_can_go_right() {
    let mut h = harness();
    let mut surface = Recorder::default();

    h.frame_loop
        .step(InputSnapshot::new().with_held(Key::Left), &mut surface);
    let s = sprite(&mut h.frame_loop);
    assert_eq!((s.x, s.y), (0, 0));

    h.frame_loop
        .step(InputSnapshot::new().with_held(Key::Right), &mut surface);
    let s = sprite(&mut h.frame_loop);
    assert_eq!((s.x, s.y), (10, 0));
}

#[test]
fn arrow_and_wasd_aliases_do_not_stack() {
    let mut h = harness();
    let mut surface = Recorder::default();

    let input = InputSnapshot::new()
        .with_held(Key::Right)
        .with_held(Key::D)
        .with_held(Key::Down);
    h.frame_loop.step(input, &mut surface);

    let s = sprite(&mut h.frame_loop);
    assert_eq!((s.x, s.y), (10, 10));
}

#[test]
fn sprite_stops_at_the_right_edge() {
    let mut h = harness();
    let mut surface = Recorder::default();

    for _ in 0..100 {
        h.frame_loop
            .step(InputSnapshot::new().with_held(Key::Right), &mut surface);
    }

    // 670 is the last multiple of 10 with x + 128 <= 800
    assert_eq!(sprite(&mut h.frame_loop).x, 670);
}

#[test]
fn wall_bounce_queues_one_wall_sound() {
    let mut h = harness();
    set_label(
        &mut h.frame_loop,
        MovingRect::new(498, 100, 300, 100).with_velocity(2, 2),
    );
    let mut surface = Recorder::default();

    h.frame_loop.step(InputSnapshot::new(), &mut surface);

    let l = label(&mut h.frame_loop);
    assert_eq!((l.x, l.y, l.vx, l.vy), (500, 102, -2, 2));
    let cmds: Vec<AudioCmd> = h.rx_cmd.try_iter().collect();
    assert_eq!(
        cmds,
        vec![AudioCmd::PlayFx {
            id: "wall".into()
        }]
    );
}

#[test]
fn corner_hit_queues_two_wall_sounds() {
    let mut h = harness();
    set_label(
        &mut h.frame_loop,
        MovingRect::new(498, 498, 300, 100).with_velocity(2, 2),
    );
    let mut surface = Recorder::default();

    h.frame_loop.step(InputSnapshot::new(), &mut surface);

    let l = label(&mut h.frame_loop);
    assert_eq!((l.vx, l.vy), (-2, -2));
    assert_eq!(h.rx_cmd.try_iter().count(), 2);
}

#[test]
fn label_stays_near_the_arena_over_many_frames() {
    let mut h = harness();
    let mut surface = Recorder::default();

    for _ in 0..2000 {
        h.frame_loop.step(InputSnapshot::new(), &mut surface);
        let l = label(&mut h.frame_loop);
        assert!(l.x >= -2 && l.x + l.w <= 802, "x out of range: {:?}", l);
        assert!(l.y >= -2 && l.y + l.h <= 602, "y out of range: {:?}", l);
    }
    assert!(h.rx_cmd.try_iter().count() > 0);
}

#[test]
fn space_flashes_color_and_plays_sprite_sound() {
    let mut h = harness();
    let shared = h.frame_loop.world().resource::<SharedDrawColor>().clone();
    let mut surface = Recorder::default();

    h.frame_loop.step(key_down(Key::Space), &mut surface);

    assert_eq!(shared.writes(), 1);
    assert_eq!(surface.ops[0], Op::Clear(shared.load()));
    let cmds: Vec<AudioCmd> = h.rx_cmd.try_iter().collect();
    assert_eq!(
        cmds,
        vec![AudioCmd::PlayFx {
            id: "sprite".into()
        }]
    );
}

#[test]
fn m_pauses_and_resumes_playing_music() {
    let mut h = harness();
    h.frame_loop.world_mut().resource_mut::<PlaybackState>().music = MusicStatus::Playing;
    let mut surface = Recorder::default();

    h.frame_loop.step(key_down(Key::M), &mut surface);
    assert!(h.frame_loop.world().resource::<PlaybackState>().is_paused());
    assert_eq!(
        h.rx_cmd.try_iter().collect::<Vec<_>>(),
        vec![AudioCmd::PauseMusic {
            id: "theme".into()
        }]
    );

    h.frame_loop.step(key_down(Key::M), &mut surface);
    assert_eq!(
        h.frame_loop.world().resource::<PlaybackState>().music,
        MusicStatus::Playing
    );
    assert_eq!(
        h.rx_cmd.try_iter().collect::<Vec<_>>(),
        vec![AudioCmd::ResumeMusic {
            id: "theme".into()
        }]
    );
}

#[test]
fn m_without_music_does_nothing() {
    let mut h = harness();
    let mut surface = Recorder::default();

    h.frame_loop.step(key_down(Key::M), &mut surface);

    assert_eq!(
        h.frame_loop.world().resource::<PlaybackState>().music,
        MusicStatus::Stopped
    );
    assert_eq!(h.rx_cmd.try_iter().count(), 0);
}

#[test]
fn audio_thread_reports_update_playback() {
    let mut h = harness();
    let mut surface = Recorder::default();

    h.tx_msg
        .send(AudioMessage::MusicPlayStarted { id: "theme".into() })
        .unwrap();
    h.frame_loop.step(InputSnapshot::new(), &mut surface);
    assert_eq!(
        h.frame_loop.world().resource::<PlaybackState>().music,
        MusicStatus::Playing
    );

    h.tx_msg
        .send(AudioMessage::MusicFinished { id: "theme".into() })
        .unwrap();
    h.frame_loop.step(InputSnapshot::new(), &mut surface);
    assert_eq!(
        h.frame_loop.world().resource::<PlaybackState>().music,
        MusicStatus::Stopped
    );
}

#[test]
fn pause_and_resume_reports_are_mirrored() {
    let mut h = harness();
    h.frame_loop.world_mut().resource_mut::<PlaybackState>().music = MusicStatus::Playing;
    let mut surface = Recorder::default();

    h.tx_msg
        .send(AudioMessage::MusicPaused { id: "theme".into() })
        .unwrap();
    h.frame_loop.step(InputSnapshot::new(), &mut surface);
    assert!(h.frame_loop.world().resource::<PlaybackState>().is_paused());

    // a looped restart while paused keeps the paused view
    h.tx_msg
        .send(AudioMessage::MusicPlayStarted { id: "theme".into() })
        .unwrap();
    h.frame_loop.step(InputSnapshot::new(), &mut surface);
    assert!(h.frame_loop.world().resource::<PlaybackState>().is_paused());

    h.tx_msg
        .send(AudioMessage::MusicResumed { id: "theme".into() })
        .unwrap();
    h.frame_loop.step(InputSnapshot::new(), &mut surface);
    assert_eq!(
        h.frame_loop.world().resource::<PlaybackState>().music,
        MusicStatus::Playing
    );

    // reports about other tracks are ignored
    h.tx_msg
        .send(AudioMessage::MusicPaused { id: "other".into() })
        .unwrap();
    h.frame_loop.step(InputSnapshot::new(), &mut surface);
    assert_eq!(
        h.frame_loop.world().resource::<PlaybackState>().music,
        MusicStatus::Playing
    );
}

#[test]
fn queued_loads_reach_the_audio_thread_on_first_frame() {
    let mut h = harness();
    let config = bounceloop::resources::gameconfig::GameConfig::new();
    game::queue_audio_loads(h.frame_loop.world_mut(), &config);
    let mut surface = Recorder::default();

    h.frame_loop.step(InputSnapshot::new(), &mut surface);

    let cmds: Vec<AudioCmd> = h.rx_cmd.try_iter().collect();
    assert_eq!(cmds.len(), 3);
    assert!(matches!(cmds[2], AudioCmd::LoadMusic { .. }));
}

#[test]
fn loop_without_audio_bridge_still_runs() {
    let mut frame_loop = FrameLoop::new(game::build_world(layout()));
    let mut surface = Recorder::default();

    frame_loop.step(key_down(Key::Space), &mut surface);

    assert_eq!(frame_loop.frames(), 1);
}

#[test]
fn run_plays_theme_and_stops_on_close() {
    let mut h = harness();
    let mut host = ScriptedHost {
        script: VecDeque::from(vec![
            InputSnapshot::new(),
            InputSnapshot::new().with_held(Key::S),
            InputSnapshot::new(),
        ]),
        surface: Recorder::default(),
    };

    h.frame_loop
        .run(&mut host, Duration::ZERO, Duration::from_secs(3600));

    assert_eq!(h.frame_loop.frames(), 3);
    assert_eq!(
        *h.frame_loop.world().resource::<LoopState>(),
        LoopState::Terminated
    );
    let presents = host
        .surface
        .ops
        .iter()
        .filter(|op| **op == Op::Present)
        .count();
    assert_eq!(presents, 3);
    assert_eq!(sprite(&mut h.frame_loop).y, 10);
    let cmds: Vec<AudioCmd> = h.rx_cmd.try_iter().collect();
    assert_eq!(
        cmds.first(),
        Some(&AudioCmd::PlayMusic {
            id: "theme".into(),
            looped: true
        })
    );
}

#[test]
fn run_repaints_background_on_the_timer_and_stops_it_on_exit() {
    let mut h = harness();
    let shared = h.frame_loop.world().resource::<SharedDrawColor>().clone();
    let mut host = ScriptedHost {
        script: (0..6).map(|_| InputSnapshot::new()).collect(),
        surface: Recorder::default(),
    };

    h.frame_loop
        .run(&mut host, Duration::from_millis(5), Duration::from_millis(1));

    assert_eq!(h.frame_loop.frames(), 6);
    let writes = shared.writes();
    assert!(writes > 0, "timer never fired");
    assert!(
        host.surface
            .ops
            .iter()
            .any(|op| matches!(op, Op::Clear(c) if *c != DrawColor::BLACK)),
        "no frame was cleared with a timer color"
    );

    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(shared.writes(), writes, "timer still running after run()");
}

//! Palette and shared copy used by every scene.

use crate::foundation::color::Rgba8;

/// Accent for numbers, links and the selection cursor.
pub const CYAN: Rgba8 = Rgba8::rgb(0x58, 0xa6, 0xff);
/// Prompts, ticks and success.
pub const GREEN: Rgba8 = Rgba8::rgb(0x3f, 0xb9, 0x50);
/// Third stat counter.
pub const YELLOW: Rgba8 = Rgba8::rgb(0xd2, 0x99, 0x22);
/// Intro subtitle.
pub const PURPLE: Rgba8 = Rgba8::rgb(0xa3, 0x71, 0xf7);
/// Primary text.
pub const TEXT: Rgba8 = Rgba8::rgb(0xe6, 0xed, 0xf3);
/// Secondary text.
pub const DIM: Rgba8 = Rgba8::rgb(0x8b, 0x94, 0x9e);

/// Darkest background tone.
pub const BG_DEEP: Rgba8 = Rgba8::rgb(0x0d, 0x11, 0x17);
/// Terminal and panel fill.
pub const BG_PANEL: Rgba8 = Rgba8::rgb(0x16, 0x1b, 0x22);
/// Borders and empty progress track.
pub const BORDER: Rgba8 = Rgba8::rgb(0x30, 0x36, 0x3d);

/// Command typed in the terminal and shown in the call-to-action.
pub const INSTALL_COMMAND: &str = "npx @orchestra-research/ai-research-skills";
/// Repository shown at the end.
pub const REPO_URL: &str = "github.com/orchestra-research/ai-research-skills";

/// Skills installed by the full selection.
pub const TOTAL_SKILLS: u32 = 82;
/// Categories in the full library.
pub const TOTAL_CATEGORIES: u32 = 20;
/// Coding agents found by the installer.
pub const TOTAL_AGENTS: u32 = 5;

/// Categories shown in the installer, with their skill counts.
pub const CATEGORIES: [(&str, u32); 8] = [
    ("Post-Training & RL", 14),
    ("Inference & Serving", 11),
    ("Distributed Training", 12),
    ("Evaluation & Benchmarks", 9),
    ("Data Processing", 10),
    ("Interpretability", 8),
    ("Multimodal", 6),
    ("Paper Writing", 5),
];

use voyager_common::{Console, Tone};

const BANNER: &str = r"
 __     __
 \ \   / /__  _   _  __ _  __ _  ___ _ __
  \ \ / / _ \| | | |/ _` |/ _` |/ _ \ '__|
   \ V / (_) | |_| | (_| | (_| |  __/ |
    \_/ \___/ \__, |\__,_|\__, |\___|_|
              |___/       |___/
";

pub fn print_banner(console: &mut dyn Console) {
    for line in BANNER.trim_matches('\n').lines() {
        console.emit(Tone::Banner, line);
    }
    console.emit(
        Tone::Plain,
        "Search Wikivoyage, pick a destination and ask the guide anything about it.",
    );
    console.blank();
}

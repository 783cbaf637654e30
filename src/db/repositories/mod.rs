mod emotions;
mod streaks;

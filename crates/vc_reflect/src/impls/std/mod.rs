mod hash_map;
mod time;

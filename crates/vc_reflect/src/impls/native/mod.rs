mod native_array;
mod native_primitive;
mod native_str;

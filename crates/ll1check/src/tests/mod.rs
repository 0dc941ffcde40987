
mod property_closure;

mod add_favorite;
mod get_favorite_item;
mod remove_favorite;

mod delete_user;
mod update_user;

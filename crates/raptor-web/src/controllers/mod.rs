//! Controller handler functions and the registry wiring them up.

pub mod admin;
pub mod api;
pub mod blog;
pub mod home;
pub mod users;

use raptor_router::HandlerRegistry;

/// Builds the handler registry covering every action the route tables
/// declare. Populated once at startup; an action missing here dispatches
/// as a 500.
pub fn registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();

    registry.register("HomeController@index", home::index);
    registry.register("HomeController@about", home::about);
    registry.register("HomeController@contact", home::contact);

    registry.register("UserController@index", users::index);
    registry.register("UserController@create", users::create);
    registry.register("UserController@store", users::store);
    registry.register("UserController@show", users::show);
    registry.register("UserController@edit", users::edit);
    registry.register("UserController@update", users::update);
    registry.register("UserController@destroy", users::destroy);

    registry.register("BlogController@index", blog::index);
    registry.register("BlogController@show", blog::show);
    registry.register("BlogController@category", blog::category);

    registry.register("AdminController@dashboard", admin::dashboard);
    registry.register("AdminController@users", admin::users);
    registry.register("AdminController@settings", admin::settings);

    registry.register("api::SystemController@status", api::status);
    registry.register("api::SystemController@health", api::health);
    registry.register("api::UserController@index", api::user_index);
    registry.register("api::UserController@store", api::user_store);
    registry.register("api::UserController@show", api::user_show);
    registry.register("api::UserController@update", api::user_update);
    registry.register("api::UserController@destroy", api::user_destroy);
    registry.register("api::UserController@me", api::me);
    registry.register("api::UserController@update_profile", api::update_profile);
    registry.register("api::PostController@index", api::post_index);
    registry.register("api::PostController@store", api::post_store);
    registry.register("api::PostController@show", api::post_show);
    registry.register("api::AuthController@logout", api::logout);

    registry
}

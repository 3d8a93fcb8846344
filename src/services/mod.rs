// Remote services
// Clients for the HTTP APIs the page talks to

pub mod shortener_api;

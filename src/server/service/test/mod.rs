use axum::Router;

mod application;
mod payment;

/// Serves `router` on an ephemeral local port, standing in for an external HTTP API.
///
/// # Returns
/// - Base URL of the running stub, e.g. `http://127.0.0.1:41234`
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

// Import required functions and types
use message_board::database::init::init_db;
use message_board::routes::app_routes::create_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

// The main entry point for the application using the tokio runtime.
#[tokio::main]
async fn main() {
    // Initialize the logger for logging messages
    env_logger::init();

    // Initialize the database connection and handle errors
    let db = match init_db().await {
        Ok(db) => {
            println!("Database initialized successfully!");
            db
        }
        Err(e) => {
            eprintln!("Error initializing the database: {}", e);
            return;
        }
    };

    // Wrap the Pool in an Arc
    let db = Arc::new(db);

    // Create the router using the function from the router module
    let app = create_router(db);

    // Set the server address to listen on all IP addresses (0.0.0.0) and port 3000
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    println!("Server running on http://{}", addr);

    // Start the server, binding to the specified address and enabling graceful shutdown
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

// A function to handle graceful shutdown by listening for termination signals.
async fn shutdown_signal() {
    // Handle Ctrl+C signal for graceful shutdown
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    // Unix-specific signal handling (e.g., SIGTERM)
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    // Wait for either Ctrl+C or the termination signal
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Signal received, starting graceful shutdown");
}

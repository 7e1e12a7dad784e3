use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use url::Url;

/// A local endpoint that accepts connections but never answers.
pub struct StalledServer {
    url: Url,
}

impl StalledServer {
    /// Each accepted connection is held open for `hold` before being dropped.
    pub fn start(hold: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for mut stream in listener.incoming().flatten() {
                thread::spawn(move || {
                    let mut buf = [0u8; 1024];
                    let _ = stream.read(&mut buf);
                    thread::sleep(hold);
                });
            }
        });

        Self { url: Url::parse(&format!("http://{}/run", addr)).unwrap() }
    }

    pub fn url(&self) -> Url {
        self.url.clone()
    }
}

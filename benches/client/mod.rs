use criterion::Criterion;
use evhttp::client::Client;
use evhttp::request::{Method, Request};
use evhttp::transport::{Event, Transport};

struct NullTransport;

impl Transport for NullTransport {
    type Error = ();

    fn connect(&mut self, _host: &str, _port: u16, _tls: bool) -> Result<(), ()> {
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ()> {
        Ok(buf.len())
    }

    fn close(&mut self, _force: bool) {}
}

pub fn bench_request_cycle(c: &mut Criterion) {
    let response: &[u8] =
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{\"ok\":true}";
    let request = Request {
        method: Method::Post,
        host: "device.example",
        port: 80,
        path: "/api/v1/telemetry",
        body: Some(b"temp=23.5"),
    };

    c.bench_function("client/request_cycle", |b| {
        b.iter(|| {
            let mut client = Client::new(NullTransport);
            client.connect(&request, false).unwrap();
            client.process_event(Event::Connected { now_ms: 0 });
            client.process_event(Event::Data {
                now_ms: 1,
                chunk: response,
            });
            client.process_event(Event::Disconnected);
            assert!(client.last_error().is_none());
        })
    });
}

// Listener module
// Creates the TCP listener through socket2 so socket options are set before bind

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Pending connections the kernel queues before `accept`
const LISTEN_BACKLOG: i32 = 1024;

/// Create a non-blocking `TcpListener` with `SO_REUSEADDR` enabled.
///
/// `SO_REUSEADDR` lets a restarted server rebind while old sockets sit in
/// `TIME_WAIT`.
///
/// # Arguments
///
/// * `addr` - The socket address to bind to
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    // socket2::Socket -> std::net::TcpListener -> tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_binds_ephemeral_port() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_rejects_port_in_use() {
        let first = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = first.local_addr().unwrap();
        assert!(create_listener(addr).is_err());
    }
}

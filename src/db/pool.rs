//! Bounded SQLite connection pool shared by every request.
//!
//! A fixed number of connections is opened up front. A semaphore with one
//! permit per connection gates acquisition, and the returned guard puts the
//! connection back when it is dropped, whether the caller returned normally,
//! with an error, or by unwinding.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::ops::Deref;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, error};

/// Number of connections the service keeps open.
pub const CONCURRENT_CONNECTIONS: usize = 4;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct DbPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    idle: Mutex<Vec<Connection>>,
    permits: Arc<Semaphore>,
}

impl DbPool {
    pub fn open(path: &str) -> AppResult<Self> {
        Self::with_size(path, CONCURRENT_CONNECTIONS)
    }

    pub fn with_size(path: &str, size: usize) -> AppResult<Self> {
        if size == 0 {
            return Err(AppError::Pool("pool size must be at least 1".into()));
        }

        let mut conns = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open(Path::new(path))?;
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conns.push(conn);
        }
        debug!("Opened {size} connections to {path}");

        Ok(Self {
            inner: Arc::new(PoolInner {
                idle: Mutex::new(conns),
                permits: Arc::new(Semaphore::new(size)),
            }),
        })
    }

    /// Wait for a free connection.
    pub async fn acquire(&self) -> AppResult<PooledConn> {
        let permit = self
            .inner
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| AppError::Pool("pool is closed".into()))?;

        let conn = self
            .inner
            .idle
            .lock()
            .map_err(|_| AppError::Pool("pool lock poisoned".into()))?
            .pop()
            .ok_or_else(|| AppError::Pool("permit granted but no idle connection".into()))?;

        Ok(PooledConn {
            conn: Some(conn),
            pool: Arc::clone(&self.inner),
            _permit: permit,
        })
    }

    /// Acquire a connection and run one blocking closure on it off the
    /// async executor.
    pub async fn run<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.acquire().await?;
        tokio::task::spawn_blocking(move || func(&conn)).await?
    }

    /// Connections currently checked in.
    pub fn idle_count(&self) -> usize {
        self.inner.idle.lock().map(|idle| idle.len()).unwrap_or(0)
    }
}

/// A checked-out connection. Returns itself to the pool on drop.
pub struct PooledConn {
    conn: Option<Connection>,
    pool: Arc<PoolInner>,
    _permit: OwnedSemaphorePermit,
}

impl Deref for PooledConn {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        // Only `drop` takes the connection out.
        self.conn.as_ref().expect("pooled connection already released")
    }
}

impl Drop for PooledConn {
    fn drop(&mut self) {
        // The permit field is dropped after this body, so the connection is
        // back in `idle` before another waiter can be woken.
        if let Some(conn) = self.conn.take() {
            match self.pool.idle.lock() {
                Ok(mut idle) => idle.push(conn),
                Err(_) => error!("Connection pool lock poisoned; dropping connection"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connections_are_returned_after_use() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.sqlite");
        let pool = DbPool::with_size(path.to_str().unwrap(), 2).unwrap();

        assert_eq!(pool.idle_count(), 2);
        {
            let _a = pool.acquire().await.unwrap();
            let _b = pool.acquire().await.unwrap();
            assert_eq!(pool.idle_count(), 0);
        }
        assert_eq!(pool.idle_count(), 2);
    }

    #[tokio::test]
    async fn failed_closures_still_release() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.sqlite");
        let pool = DbPool::with_size(path.to_str().unwrap(), 1).unwrap();

        let res: AppResult<()> = pool
            .run(|conn| {
                conn.execute("INSERT INTO missing_table VALUES (1)", [])?;
                Ok(())
            })
            .await;
        assert!(matches!(res, Err(AppError::Db(_))));
        assert_eq!(pool.idle_count(), 1);

        let one: i64 = pool
            .run(|conn| Ok(conn.query_row("SELECT 1", [], |r| r.get(0))?))
            .await
            .unwrap();
        assert_eq!(one, 1);
    }

    #[test]
    fn zero_sized_pool_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.sqlite");
        assert!(DbPool::with_size(path.to_str().unwrap(), 0).is_err());
    }
}

use crate::docker;
use crate::installer::Reporter;
use std::io;
use std::time::Duration;

/// Seam over "list running containers by name substring".
pub trait ContainerLister {
    fn running_names(&self, filter: &str) -> io::Result<Vec<String>>;
}

pub struct DockerLister {
    pub bin: String,
    pub timeout: Duration,
}

impl ContainerLister for DockerLister {
    fn running_names(&self, filter: &str) -> io::Result<Vec<String>> {
        docker::running_container_names(&self.bin, filter, self.timeout)
    }
}

/// Advisory check that at least one matching service container is running.
/// Errors from the runtime query are logged and become `false`.
pub fn verify(lister: &dyn ContainerLister, filter: &str, reporter: &Reporter) -> bool {
    match lister.running_names(filter) {
        Ok(names) => {
            let found = names.iter().any(|name| name.contains(filter));
            if found {
                reporter.log(format!("{} containers are running", filter));
            } else {
                reporter.log(format!("{} containers not found", filter));
            }
            found
        }
        Err(e) => {
            reporter.log(format!("Verification failed: {}", e));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::Installer;

    struct FakeLister {
        result: io::Result<Vec<String>>,
    }

    impl ContainerLister for FakeLister {
        fn running_names(&self, _filter: &str) -> io::Result<Vec<String>> {
            match &self.result {
                Ok(names) => Ok(names.clone()),
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    #[test]
    fn true_when_a_name_contains_the_filter() {
        let lister = FakeLister {
            result: Ok(vec!["vx0-edge-node".to_string(), "postgres".to_string()]),
        };
        let installer = Installer::new();
        assert!(verify(&lister, "vx0", &installer.reporter()));
    }

    #[test]
    fn false_when_no_name_matches() {
        let lister = FakeLister {
            result: Ok(vec!["postgres".to_string()]),
        };
        let installer = Installer::new();
        assert!(!verify(&lister, "vx0", &installer.reporter()));
    }

    #[test]
    fn listing_errors_are_swallowed_into_false() {
        let lister = FakeLister {
            result: Err(io::Error::other("docker daemon not reachable")),
        };
        let installer = Installer::new();

        assert!(!verify(&lister, "vx0", &installer.reporter()));

        let logs = installer.logs.lock().unwrap();
        assert!(logs.iter().any(|l| l.contains("Verification failed")));
    }
}

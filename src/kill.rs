/*!
Self-termination.
*/

/**
Send `SIGTERM` to `pid`. Pass `std::process::id()` to end the calling
process. A failed delivery is not reported.
*/
pub fn terminate(pid: u32) {
    log::trace!("terminate( {} ) called.", pid);

    let pid = match libc::pid_t::try_from(pid) {
        Ok(pid) => pid,
        Err(_) => {
            log::warn!("pid {} out of range; not signalled.", pid);
            return;
        },
    };

    // SAFETY: kill(2) takes plain integers and touches no memory of ours.
    let res = unsafe { libc::kill(pid, libc::SIGTERM) };
    if res != 0 {
        log::debug!("kill({}, SIGTERM) failed: {}", pid, std::io::Error::last_os_error());
    }
}

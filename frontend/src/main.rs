fn main() {
    wfh_attendance_frontend::boot();
}

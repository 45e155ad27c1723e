//! Help command handler

use crate::models::profile::UserRole;
use crate::state::AppContext;

const COMMON_HELP: &str = "🏀 HoopBuddy 도움말\n\n\
    login <이름> - 로그인\n\
    role [host|guest|reset] - 역할 확인/선택\n\
    profile [show|set|open|close] - 프로필\n\
    show <모임> - 모임 상세\n\
    help - 도움말\n\
    quit - 종료";

const HOST_HELP: &str = "\n\n[호스트]\n\
    create --location L --date YYYY-MM-DD --start HH:MM --end HH:MM --court indoor|outdoor\n\
    \x20      [--guard N] [--forward N] [--center N] [--gender any|male|female]\n\
    \x20      [--level any|beginner|intermediate|advanced] [--cost C] [--message M]\n\
    mine - 내 모임 목록\n\
    receive <모임> <이름> <포지션> [--skill X] - 신청 접수\n\
    approve|reject <모임> <참가자> - 승인/거절\n\
    close <모임> - 모집 마감\n\
    rate <모임> <참가자> <1-5> - 별점\n\
    tag <모임> <참가자> <태그> - 태그\n\
    noshow <모임> <참가자> - 노쇼 표시 전환\n\
    gate <모임> - 평가가 남은 참가자\n\
    complete <모임> - 평가 완료";

const GUEST_HELP: &str = "\n\n[게스트]\n\
    list [--search Q] [--location L] [--hour HH] [--position P] [--gender G]\n\
    \x20    [--sort default|host_rating|latest] - 모임 찾기\n\
    apply <모임> - 참여 신청\n\
    cancel <모임> - 신청 취소\n\
    confirm <모임> - 참여 확정 처리\n\
    review <모임> <1-5> [--tag T] - 호스트 평가";

/// Help text for the current role; both sections when no role is selected
pub fn help_text(ctx: &AppContext) -> String {
    match ctx.session.role {
        Some(UserRole::Host) => format!("{}{}", COMMON_HELP, HOST_HELP),
        Some(UserRole::Guest) => format!("{}{}", COMMON_HELP, GUEST_HELP),
        None => format!("{}{}{}", COMMON_HELP, HOST_HELP, GUEST_HELP),
    }
}
